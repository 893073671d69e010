/// Binary entrypoint for the `rollqr` executable.
///
/// Keeps the binary thin — all business logic lives in the `rollqr_lib` crate
/// so unit tests can import library functions directly.
fn main() {
    rollqr_lib::run();
}
