//! Field lists: select list, `GROUP BY` and `ORDER BY`.
//!
//! The first element of a list is written as is, the following ones are
//! preceded by a comma. Suffixes (`AS`, `ASC`, `DESC`) apply to the last
//! element written.

use super::select::SelectBuilder;

impl SelectBuilder {
    /// Appends a column or expression to the current list.
    #[must_use]
    pub fn field(mut self, column: &str) -> Self {
        self.push_list_element(column);
        self
    }

    /// Appends several columns to the current list.
    #[must_use]
    pub fn fields<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for column in columns {
            self.push_list_element(column.as_ref());
        }
        self
    }

    /// Appends ` AS <alias>`.
    #[must_use]
    pub fn alias(mut self, alias: &str) -> Self {
        self.sql.push_str(" AS ");
        self.sql.push_str(alias);
        self
    }

    /// Appends ` ASC`.
    #[must_use]
    pub fn asc(mut self) -> Self {
        self.sql.push_str(" ASC");
        self
    }

    /// Appends ` DESC`.
    #[must_use]
    pub fn desc(mut self) -> Self {
        self.sql.push_str(" DESC");
        self
    }

    /// Starts a ` GROUP BY` list with `column`.
    #[must_use]
    pub fn group_by(self, column: &str) -> Self {
        self.start_list(" GROUP BY ", column)
    }

    /// Starts an ` ORDER BY` list with `column`.
    #[must_use]
    pub fn order_by(self, column: &str) -> Self {
        self.start_list(" ORDER BY ", column)
    }

    fn start_list(mut self, keyword: &str, column: &str) -> Self {
        self.sql.push_str(keyword);
        self.list_open = false;
        self.push_list_element(column);
        self
    }

    fn push_list_element(&mut self, column: &str) {
        if self.list_open {
            self.sql.push(',');
        }
        self.sql.push_str(column);
        self.list_open = true;
    }
}
