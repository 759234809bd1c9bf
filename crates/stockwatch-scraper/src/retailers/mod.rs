//! Hand-written extractors, one per retailer page layout.

mod bestbuy;
mod bhphoto;
mod evga;
mod newegg;
mod search_results;

pub(crate) use bestbuy::extract_bestbuy_stock;
pub(crate) use bhphoto::extract_bhphoto_stock;
pub(crate) use evga::extract_evga_stock;
pub(crate) use newegg::extract_newegg_stock;
