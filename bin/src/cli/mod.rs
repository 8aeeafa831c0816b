//! Command line programs. Each has an `Args` parser, a `run` function doing the work, and a
//! `main` function applying the exit status conventions of [utils::cli].

pub mod extracttables;
pub mod preprocesscsv;
