pub mod erp_response;
pub mod list_query;
pub mod projection;
