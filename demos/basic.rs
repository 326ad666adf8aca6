use nsurl::{ComponentMask, Url};

fn main() {
    // Parse and normalise a URL
    let url = Url::parse("HTTP://User@Example.COM:80/docs/guide.html?q=a b#intro")
        .expect("Failed to parse URL");

    println!("URL: {url}"); // http://User@example.com/docs/guide.html?q=a%20b#intro
    println!("Scheme: {}", url.scheme()); // http
    println!("Username: {:?}", url.username()); // Some("User")
    println!("Host: {:?}", url.host()); // Some("example.com")
    println!("Port: {:?}", url.port()); // None
    println!("Path: {:?}", url.path()); // Some("/docs/guide.html")
    println!("Query: {:?}", url.query()); // Some("q=a%20b")
    println!("Fragment: {:?}", url.fragment()); // Some("intro")

    // Resolve a relative reference
    let next = url.join("../img/logo.png").expect("Failed to join URL");
    println!("Joined: {next}"); // http://User@example.com/img/logo.png

    // Same-origin check
    let origin = ComponentMask::SCHEME | ComponentMask::HOST | ComponentMask::PORT;
    println!("Same origin: {}", url.compare(&next, origin)); // true

    // Derived URLs
    println!("Parent: {}", url.parent().expect("Failed to get parent")); // http://User@example.com/docs/
    println!("Nice name: {:?}", url.nice(true)); // Some("guide")
}
