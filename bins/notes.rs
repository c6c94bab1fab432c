//! `notes` service: serves `/notes` from an in-memory store.

fn main() -> std::process::ExitCode {
    server::launcher::launch(server::ServiceKind::Notes)
}
