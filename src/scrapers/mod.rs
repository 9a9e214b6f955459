//! Scrapers for Adobe security pages.
//!
//! | Source | Module | Method |
//! |--------|--------|--------|
//! | helpx.adobe.com product security pages | [`adobe`] | HTML scraping |
//!
//! The product pages link each bulletin from an anchor whose text carries the
//! `APSB` identifier. Scrapers fetch the page once, keep the anchors that
//! match, and return absolute URLs in document order.

pub mod adobe;
