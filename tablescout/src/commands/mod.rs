//! One module per subcommand. Each sanitizes its inputs, builds its SQL,
//! runs it through the shared warehouse plumbing, and writes console plus
//! report output.

pub(crate) mod ddl;
pub(crate) mod distinct;
pub(crate) mod migrate;
pub(crate) mod query;
pub(crate) mod sample;
pub(crate) mod schema;
pub(crate) mod stats;
pub(crate) mod test;
