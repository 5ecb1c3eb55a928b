use poem_openapi::Object;

/// Registers the caller as the seller of a new shop.
#[derive(Debug, Clone, Object)]
pub struct RegisterSellerRequest {
    /// Shop name (cannot be empty)
    pub shop_name: String,
    #[oai(skip_serializing_if_is_none)]
    pub shop_info: Option<String>,
    /// Shop contact phone (cannot be empty)
    pub shop_phone: String,
}
