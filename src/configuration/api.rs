#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthenticationScheme {
    Jwt,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaginationStyle {
    PageNumber,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaGenerator {
    Auto,
}

#[derive(Clone, Debug)]
pub struct ApiSettings {
    pub authentication: &'static [AuthenticationScheme],
    pub pagination: PaginationStyle,
    pub page_size: u32,
    pub schema: SchemaGenerator,
}

impl ApiSettings {
    pub(crate) fn new(page_size: u32) -> Self {
        Self {
            authentication: &[AuthenticationScheme::Jwt],
            pagination: PaginationStyle::PageNumber,
            page_size,
            schema: SchemaGenerator::Auto,
        }
    }
}

/// Metadata of the generated OpenAPI document.
#[derive(Clone, Debug)]
pub struct ApiDocsSettings {
    pub title: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub serve_include_schema: bool,
}

impl Default for ApiDocsSettings {
    fn default() -> Self {
        Self {
            title: "Django API Template",
            description: "Django API Template",
            version: "1.0.0",
            serve_include_schema: false,
        }
    }
}
