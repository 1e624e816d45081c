#![forbid(unsafe_code)]
//! Binary target for the portfolio page; only does real work when built for wasm32.

#[cfg(target_arch = "wasm32")]
fn main() {
    folio_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_NOTICE: &str = "folio-ui drives a browser page and has nothing to do natively.\n\
Build it with `trunk build`, or `cargo build --target wasm32-unknown-unknown` and bind the module with wasm-bindgen.\n";

#[cfg(not(target_arch = "wasm32"))]
fn write_notice(out: &mut impl std::io::Write) -> std::io::Result<()> {
    out.write_all(NATIVE_NOTICE.as_bytes())?;
    out.flush()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    write_notice(&mut std::io::stderr().lock())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn notice_names_the_wasm_target() -> std::io::Result<()> {
        let mut out = Vec::new();
        write_notice(&mut out)?;
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("wasm32-unknown-unknown"));
        assert!(text.ends_with('\n'));
        Ok(())
    }
}
