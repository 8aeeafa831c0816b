use std::process::ExitCode;

fn main() -> ExitCode {
    pdftables_bin::cli::preprocesscsv::main()
}
