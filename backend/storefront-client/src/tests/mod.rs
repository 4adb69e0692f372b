mod api_reply;
mod config;
mod page_location;
mod password_reset;
mod paths;
mod price;
mod product_payload;
