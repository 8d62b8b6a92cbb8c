//! Domain model: wire records as Notion returns them, and the display
//! shapes the blog derives from them.

pub mod blocks;
mod post;
mod property_bag;
mod record;
mod rich_text;

pub use blocks::{BlockKind, FileSource, TextBlock};
pub use post::{DocumentProperties, PostSummary};
pub use property_bag::PropertyBag;
pub use record::{BlockRecord, DocumentRecord};
pub use rich_text::{plain_text, Annotations, RichText, RichTextContent, RichTextLink};
