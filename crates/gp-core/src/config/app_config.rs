/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub paging: PagingConfig,
}

/// Catalog API settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    /// Endpoint of the paged artwork listing (may be empty - a fact, not an error)
    pub base_url: String,

    /// Request timeout in milliseconds (0 means "not configured")
    pub timeout_ms: u64,

    /// Field names to request; empty means the API's default field set
    pub fields: Vec<String>,
}

/// Pagination settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagingConfig {
    /// Rows per page (0 means "not configured")
    pub page_size: u32,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// Missing keys become empty values. Values of the wrong type are errors.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let api = toml_value.get("api");
        let paging = toml_value.get("paging");

        let fields = match api.and_then(|a| a.get("fields")) {
            None => Vec::new(),
            Some(value) => value
                .as_array()
                .ok_or_else(|| anyhow::anyhow!("api.fields must be an array of strings"))?
                .iter()
                .map(|field| {
                    field
                        .as_str()
                        .map(str::to_string)
                        .ok_or_else(|| anyhow::anyhow!("api.fields must be an array of strings"))
                })
                .collect::<anyhow::Result<Vec<_>>>()?,
        };

        let page_size = paging
            .and_then(|p| p.get("page_size"))
            .and_then(|v| v.as_integer())
            .unwrap_or(0);

        Ok(Self {
            api: ApiConfig {
                base_url: api
                    .and_then(|a| a.get("base_url"))
                    .and_then(|v| v.as_str())
                    .unwrap_or("")
                    .to_string(),
                timeout_ms: api
                    .and_then(|a| a.get("timeout_ms"))
                    .and_then(|v| v.as_integer())
                    .map(|ms| ms.max(0) as u64)
                    .unwrap_or(0),
                fields,
            },
            paging: PagingConfig {
                page_size: u32::try_from(page_size.max(0)).unwrap_or(u32::MAX),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml_reads_all_sections() {
        let value: toml::Value = toml::from_str(
            r#"
            [api]
            base_url = "http://localhost:8080/artworks"
            timeout_ms = 2500
            fields = ["id", "title"]

            [paging]
            page_size = 25
            "#,
        )
        .unwrap();

        let config = AppConfig::from_toml(&value).unwrap();

        assert_eq!(config.api.base_url, "http://localhost:8080/artworks");
        assert_eq!(config.api.timeout_ms, 2500);
        assert_eq!(config.api.fields, vec!["id".to_string(), "title".to_string()]);
        assert_eq!(config.paging.page_size, 25);
    }

    #[test]
    fn test_from_toml_missing_values_are_empty() {
        let value: toml::Value = toml::from_str("").unwrap();
        let config = AppConfig::from_toml(&value).unwrap();

        assert_eq!(config.api.base_url, "");
        assert_eq!(config.api.timeout_ms, 0);
        assert!(config.api.fields.is_empty());
        assert_eq!(config.paging.page_size, 0);
    }

    #[test]
    fn test_from_toml_rejects_non_string_fields() {
        let value: toml::Value = toml::from_str("[api]\nfields = [1, 2]").unwrap();
        assert!(AppConfig::from_toml(&value).is_err());
    }
}
