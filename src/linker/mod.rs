pub mod segment;
pub mod index;
pub mod url;
pub mod overlap;
pub mod matcher;
pub mod render;

pub use segment::*;
pub use index::*;
pub use url::*;
pub use overlap::*;
pub use matcher::*;
pub use render::*;
