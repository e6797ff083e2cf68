use super::Serializer;

use skillet_core::driver::Dialect;

#[derive(Debug)]
pub(super) enum Flavor {
    Postgresql,
    Sqlite,
    Mysql,
}

impl Serializer {
    /// Serializer for the dialect a connection reports.
    pub fn for_dialect(dialect: Dialect) -> Serializer {
        match dialect {
            Dialect::Mysql => Self::mysql(),
            Dialect::Postgresql => Self::postgresql(),
            Dialect::Sqlite => Self::sqlite(),
        }
    }

    pub fn sqlite() -> Serializer {
        Serializer {
            flavor: Flavor::Sqlite,
        }
    }

    pub fn postgresql() -> Serializer {
        Serializer {
            flavor: Flavor::Postgresql,
        }
    }

    pub fn mysql() -> Serializer {
        Serializer {
            flavor: Flavor::Mysql,
        }
    }
}
