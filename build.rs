use std::env;

/// Version resources shown in the Windows file properties dialog
fn main() {
    // Build scripts run on the host; the target decides whether resources apply
    if env::var("CARGO_CFG_TARGET_OS").as_deref() != Ok("windows") {
        return;
    }

    let description = env!("CARGO_PKG_DESCRIPTION");
    let version = env!("CARGO_PKG_VERSION");

    let mut res = winres::WindowsResource::new();
    res.set("FileDescription", description)
        .set("ProductName", env!("CARGO_PKG_NAME"))
        .set("ProductVersion", version)
        .set("FileVersion", version)
        .set("OriginalFilename", "conv.exe")
        .set("InternalName", "conv");

    if let Err(e) = res.compile() {
        println!("cargo:warning=Windows resources not embedded: {}", e);
    }
}
