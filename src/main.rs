fn main() {
    // The binary exists so `cargo run` says something useful; the real
    // entry point is the wasm module's `start` in lib.rs.
    eprintln!("hrm-frontend is a browser (wasm32) module; build it with trunk or wasm-pack.");
}
