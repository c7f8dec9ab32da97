pub mod verdict;

pub use verdict::{FieldKind, FormInput, FormReport, Outcome, Verdict, VerdictBody};
