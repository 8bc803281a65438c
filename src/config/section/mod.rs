//! Configuration section definitions.
//!
//! | Section        | Purpose                                        |
//! |----------------|------------------------------------------------|
//! | `[output]`     | Generated-output root directory                |
//! | `[[variants]]` | Named variants and their asset roots           |
//! | `[xml]`        | Android string-resource target                 |
//! | `[java]`       | Java constants-class target                    |
//! | `[kotlin]`     | Kotlin constants-object target                 |

mod output;
mod rules;
mod source;
mod variant;
mod xml;

pub use output::OutputConfig;
pub use rules::ReplacementRule;
pub use source::SourceFileConfig;
pub use variant::VariantConfig;
pub use xml::XmlFileConfig;
