/*!
Module: mappers

Declares mapper submodules and re-exports their public types. This core
implements only mapper 0 (NROM); see `crate::mapper::build_mapper`.
*/

pub mod nrom;

pub use nrom::Nrom;
