//! Form field annotation from server-declared constraints.
//!
//! [`FieldTransformer`] takes the renderer's field definitions and the form
//! options naming the edited entity, looks up each field's
//! [`ValidationRule`](jarb_types::ValidationRule) in the
//! [`ConstraintsStore`](jarb_store::ConstraintsStore) and writes the matching
//! presentation options:
//!
//! | rule                               | `templateOptions`          |
//! |------------------------------------|----------------------------|
//! | `required`                         | `required: true`           |
//! | `minimumLength`                    | `minlength`                |
//! | `maximumLength` (not a date)       | `maxlength`                |
//! | `min` / `max`                      | `min` / `max`              |
//! | most specific type is `number`     | `pattern`                  |
//!
//! Fields without a rule, and fields flagged `data.ignoreJarbConstraints`,
//! pass through untouched. Zero-valued bounds count as absent.
//!
//! [`FieldWatcher`] keeps a single rendered field annotated when constraints
//! arrive or change after it was first built.

mod transformer;
mod watcher;

pub use transformer::{apply_rule, FieldTransformer};
pub use watcher::FieldWatcher;
