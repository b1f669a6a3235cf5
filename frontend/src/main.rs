fn main() {
    account_portal_frontend::start();
}
