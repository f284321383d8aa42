//! Query builder for the table interface.
//!
//! The data service accepts its query surface as URL parameters:
//! `select=` column lists (with embedded resources for joins),
//! `column=eq.value` equality filters, `order=column.direction` and
//! `limit=n`. [`Select`] builds those pairs; the HTTP layer hands them to
//! `reqwest`, which takes care of percent-encoding.

/// A table query: projection, equality filters, ordering and limit.
///
/// # Example
///
/// ```
/// use cabella_backend::Select;
///
/// let query = Select::columns("*,orders(status,total_price)")
///     .eq("client_id", "42")
///     .order_desc("created_at")
///     .limit(20);
///
/// assert_eq!(
///     query.to_params(),
///     vec![
///         ("select".to_owned(), "*,orders(status,total_price)".to_owned()),
///         ("client_id".to_owned(), "eq.42".to_owned()),
///         ("order".to_owned(), "created_at.desc".to_owned()),
///         ("limit".to_owned(), "20".to_owned()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Select {
    select: Option<String>,
    filters: Vec<(String, String)>,
    order: Option<String>,
    limit: Option<u32>,
}

impl Select {
    /// Select all columns (`select=*`).
    #[must_use]
    pub fn all() -> Self {
        Self::columns("*")
    }

    /// Select an explicit column list, possibly with embedded resources
    /// (e.g. `*,products(name,price,image_url)`).
    #[must_use]
    pub fn columns(columns: &str) -> Self {
        Self {
            select: Some(columns.to_owned()),
            ..Self::default()
        }
    }

    /// No projection at all, for updates and deletes that only filter.
    #[must_use]
    pub fn filter_only() -> Self {
        Self::default()
    }

    /// Add an equality filter on `column`.
    #[must_use]
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters
            .push((column.to_owned(), format!("eq.{}", value.to_string())));
        self
    }

    /// Order by `column` descending. Replaces any previous ordering.
    #[must_use]
    pub fn order_desc(mut self, column: &str) -> Self {
        self.order = Some(format!("{column}.desc"));
        self
    }

    /// Order by `column` ascending. Replaces any previous ordering.
    #[must_use]
    pub fn order_asc(mut self, column: &str) -> Self {
        self.order = Some(format!("{column}.asc"));
        self
    }

    /// Cap the number of returned rows.
    #[must_use]
    pub const fn limit(mut self, n: u32) -> Self {
        self.limit = Some(n);
        self
    }

    /// Render the query as URL parameter pairs, in a stable order.
    #[must_use]
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(self.filters.len() + 3);
        if let Some(select) = &self.select {
            params.push(("select".to_owned(), select.clone()));
        }
        params.extend(self.filters.iter().cloned());
        if let Some(order) = &self.order {
            params.push(("order".to_owned(), order.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_owned(), limit.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(params: &[(String, String)], key: &str) -> Option<String> {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    #[test]
    fn test_select_all() {
        let params = Select::all().to_params();
        assert_eq!(params, vec![("select".to_owned(), "*".to_owned())]);
    }

    #[test]
    fn test_filter_only_has_no_select() {
        let params = Select::filter_only().eq("id", "7").to_params();
        assert_eq!(param(&params, "select"), None);
        assert_eq!(param(&params, "id"), Some("eq.7".to_owned()));
    }

    #[test]
    fn test_multiple_filters_keep_order() {
        let params = Select::all()
            .eq("client_id", "a")
            .eq("is_read", "false")
            .to_params();
        assert_eq!(param(&params, "client_id"), Some("eq.a".to_owned()));
        assert_eq!(param(&params, "is_read"), Some("eq.false".to_owned()));
    }

    #[test]
    fn test_order_and_limit() {
        let params = Select::all().order_desc("created_at").limit(20).to_params();
        assert_eq!(param(&params, "order"), Some("created_at.desc".to_owned()));
        assert_eq!(param(&params, "limit"), Some("20".to_owned()));
    }

    #[test]
    fn test_order_asc_replaces_desc() {
        let params = Select::all()
            .order_desc("created_at")
            .order_asc("name")
            .to_params();
        assert_eq!(param(&params, "order"), Some("name.asc".to_owned()));
    }

    #[test]
    fn test_embedded_join_projection() {
        let params = Select::columns("*,orders(status,total_price)").to_params();
        assert_eq!(
            param(&params, "select"),
            Some("*,orders(status,total_price)".to_owned())
        );
    }
}
