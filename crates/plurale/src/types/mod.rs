mod locale_tag;
mod plural_type;
mod value;

pub use locale_tag::LocaleTag;
pub use plural_type::{LocaleMatcher, PluralType};
pub use value::Value;
