use super::{Comma, Formatter, Ident, Params, ToSql};

use crate::stmt::Insert;
use skillet_core::stmt;

impl ToSql for &Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = Ident(self.table.as_str());
        let columns = Comma(self.columns.iter().map(|column| Ident(column.as_str())));
        let rows = Comma(self.rows.iter().map(|row| Row(row)));
        let option = self.option.as_deref().map(|option| (" ", option));

        fmt!(f, "INSERT INTO " table " (" columns ") VALUES " rows option);
    }
}

/// One parameter tuple of a multi-row VALUES clause.
struct Row<'a>(&'a [stmt::Value]);

impl ToSql for Row<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push('(');
        let mut s = "";
        for value in self.0 {
            f.dst.push_str(s);
            let placeholder = f.params.push(value);
            placeholder.to_sql(f);
            s = ",";
        }
        f.dst.push(')');
    }
}
