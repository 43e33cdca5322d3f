pub mod create_share_link;
pub mod resolve_share_link;
