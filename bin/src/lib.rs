pub mod cli;
mod distpaths;
