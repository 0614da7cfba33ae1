use keygate::ui::App;

fn main() {
    keygate::wasm::start();
    leptos::mount::mount_to_body(App);
}
