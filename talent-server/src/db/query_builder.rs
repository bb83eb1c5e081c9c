use sqlx::Sqlite;
use sqlx::query::QueryAs;
use sqlx::sqlite::SqliteArguments;

/// Query builder for constructing SQL queries with dynamic WHERE conditions
///
/// Conditions are joined with AND; bindings are applied in the order they
/// were pushed, so every `?` must be followed by its matching `bind_*` call.
#[derive(Debug, Default)]
pub struct QueryBuilder {
    conditions: Vec<String>,
    bindings: Vec<QueryValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Text(String),
    Integer(i64),
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a condition; bind its placeholders next
    pub fn add_condition(&mut self, condition: &str) -> &mut Self {
        self.conditions.push(condition.to_string());
        self
    }

    pub fn bind_text(&mut self, value: impl Into<String>) -> &mut Self {
        self.bindings.push(QueryValue::Text(value.into()));
        self
    }

    /// `field >= ? AND field < ?` over Unix millis
    pub fn add_half_open_range(&mut self, field: &str, start: i64, end: i64) -> &mut Self {
        self.conditions.push(format!("{field} >= ? AND {field} < ?"));
        self.bindings.push(QueryValue::Integer(start));
        self.bindings.push(QueryValue::Integer(end));
        self
    }

    /// Build WHERE clause (empty if no conditions)
    pub fn build_where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.conditions.join(" AND "))
        }
    }

    /// Apply bindings to a SQLx `query_as`
    pub fn apply_bindings<'a, 'b, O>(
        &'b self,
        mut query: QueryAs<'a, Sqlite, O, SqliteArguments<'a>>,
    ) -> QueryAs<'a, Sqlite, O, SqliteArguments<'a>>
    where
        'b: 'a,
    {
        for binding in &self.bindings {
            query = match binding {
                QueryValue::Text(s) => query.bind(s.as_str()),
                QueryValue::Integer(i) => query.bind(*i),
            };
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_where_clause() {
        let builder = QueryBuilder::new();
        assert_eq!(builder.build_where_clause(), "");
    }

    #[test]
    fn test_single_condition() {
        let mut builder = QueryBuilder::new();
        builder.add_condition("name = ?").bind_text("Alice");
        assert_eq!(builder.build_where_clause(), " WHERE name = ?");
        assert_eq!(builder.bindings, vec![QueryValue::Text("Alice".into())]);
    }

    #[test]
    fn test_conditions_combine_with_and() {
        let mut builder = QueryBuilder::new();
        builder
            .add_condition("name = ?")
            .bind_text("Alice")
            .add_half_open_range("date", 10, 20);
        assert_eq!(
            builder.build_where_clause(),
            " WHERE name = ? AND date >= ? AND date < ?"
        );
        assert_eq!(
            builder.bindings,
            vec![
                QueryValue::Text("Alice".into()),
                QueryValue::Integer(10),
                QueryValue::Integer(20),
            ]
        );
    }
}
