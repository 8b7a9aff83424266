pub mod geolocation;
pub mod map_tiles;
pub mod masks;
pub mod navigation;
pub mod records;
pub mod storage;
