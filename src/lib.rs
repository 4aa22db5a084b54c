//! # radixsteps
//!
//! A number base converter that shows its work. Conversions between
//! binary, octal, decimal, and hexadecimal are recorded as typed
//! derivation steps, rendered either as plain worked-solution lines or
//! as LaTeX derivations, and exported to Excel worksheets suitable for
//! practice material.
//!
//! ## Features
//!
//! - Conversion between the four common bases with overflow-checked
//!   64-bit arithmetic
//! - Step-by-step records: positional weights towards decimal, repeated
//!   division away from it, and two-stage routes in between
//! - Route-specific LaTeX renderers (bit grouping tables, digit
//!   expansion, division traces) with a generic line-by-line fallback
//! - Parallel batch processing of request files via rayon
//! - Excel export with question, solution, and answer columns
//!
//! ## Quick Start
//!
//! ```
//! use radixsteps::{Base, ConverterBuilder, SolutionFormat};
//!
//! let converter = ConverterBuilder::new()
//!     .with_solution_format(SolutionFormat::Latex)
//!     .with_sheet_name("Practice Sheet")
//!     .build()
//!     .unwrap();
//!
//! let result = converter
//!     .convert_with_steps("1010", Base::Binary, Base::Decimal)
//!     .unwrap();
//! assert_eq!(result.output, "10");
//!
//! let latex = converter.solution(&result);
//! assert!(latex.contains("\\textbf{Final Answer:}"));
//! ```
//!
//! ## Batch Processing
//!
//! ```
//! use radixsteps::{ConverterBuilder, SolutionFormat};
//!
//! let converter = ConverterBuilder::new()
//!     .with_solution_format(SolutionFormat::Latex)
//!     .build()
//!     .unwrap();
//!
//! let input = "1010 binary decimal\n17 octal hexadecimal\n42 decimal all\n";
//! let results = converter.process_batch(input.as_bytes()).unwrap();
//! assert_eq!(results.len(), 5);
//!
//! let xlsx = converter.export_to_buffer(&results).unwrap();
//! assert!(!xlsx.is_empty());
//! ```

mod api;
mod batch;
mod builder;
mod error;
mod export;
mod latex;
mod radix;
mod steps;

pub use api::{Base, SolutionFormat};
pub use batch::{parse_request_line, process_requests, read_requests, ConversionRequest, Target};
pub use builder::{ConversionConfig, Converter, ConverterBuilder};
pub use error::RadixStepsError;
pub use latex::{transcribe, transcribe_plain_lines};
pub use radix::{convert, parse_value};
pub use steps::{record_steps, ConversionResult, Step};
