#[test]
fn scratch_dump() {
    // reproduce minimal render to inspect escaping
    use tera::Tera;
    let mut t = Tera::default();
    t.add_raw_template("apistar/docs/index.html", "url={{ u }}").unwrap();
    let mut c = tera::Context::new();
    c.insert("u", "/pets");
    let out = t.render("apistar/docs/index.html", &c).unwrap();
    eprintln!("OUT=[{}]", out);
}
