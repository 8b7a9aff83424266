fn main() {
    checkvisit_frontend::run();
}
