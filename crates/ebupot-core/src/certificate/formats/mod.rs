//! Layout-specific line scanners.

mod a;
mod b;
mod c;
mod d;
mod e;
mod f;
mod tabular;

pub use a::FormatA;
pub use b::FormatB;
pub use c::{FormatC, LayoutC};
pub use d::{FormatD, LayoutD};
pub use e::FormatE;
pub use f::FormatF;
pub use tabular::{TabularScanner, TabularVariant};
