pub mod csv;
pub mod feed;
pub mod normalize;
pub mod reading;
pub mod table;
pub mod time;

pub use self::{
    feed::{FeedEntry, FeedResponse, FeedSource},
    reading::Reading,
};
