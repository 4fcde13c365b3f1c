// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use dangerous::prelude::*;
use log::debug;

fn who_am_i() -> Dangerous {
    tags::div(template![
        "
        <h1>Who am I?</h1>
        <p>Last Name is \"" { |p| p.text("last_name").into() } "\"</p>
        <p>First Name is \"" { |p| p.text("first_name").into() } "\"</p>
        <a href=\"javascript:alert('hi');\">Show Alert</a>
        "
    ])
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    let app = who_am_i();

    debug!("mounting {}", app.display_name());

    let props = Props::new()
        .with("class", "App")
        .with("first_name", "Sung")
        .with("last_name", "Kim");

    dangerous::web::mount_at("root", app.render(&props));
}
