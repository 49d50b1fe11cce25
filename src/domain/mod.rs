pub mod images;
pub mod kind;
pub mod lenient;
pub mod normalize;
pub mod price;
pub mod probe;
pub mod records;
pub mod variant;

pub use images::{flatten, PhotoContainer};
pub use kind::{decode, encode_identifier, Kind};
pub use normalize::{normalize, ViewModel};
pub use price::{Price, PriceRule};
pub use variant::{resolve, RecordVariant, Resolution, ResolvedRecord, VariantShape};
