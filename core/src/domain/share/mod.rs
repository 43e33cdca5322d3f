pub mod codec;
pub mod errors;
pub mod fragment;

pub use codec::{decode_recipe, encode_recipe};
pub use errors::{DecodeFailure, EncodingError};
pub use fragment::{
    FRAGMENT_KEY, SHARE_URL_CONSERVATIVE_LIMIT, SHARE_URL_SOFT_LIMIT, recipe_from_fragment,
    share_url,
};
