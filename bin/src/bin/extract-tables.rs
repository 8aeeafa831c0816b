use std::process::ExitCode;

fn main() -> ExitCode {
    pdftables_bin::cli::extracttables::main()
}
