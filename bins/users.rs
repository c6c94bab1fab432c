//! `users` service: serves `/users` from an in-memory store.

fn main() -> std::process::ExitCode {
    server::launcher::launch(server::ServiceKind::Users)
}
