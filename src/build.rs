// build.rs
fn main() {
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/neis_lookup.ico");    // multi-size .ico
        res.compile().unwrap();
    }
}
