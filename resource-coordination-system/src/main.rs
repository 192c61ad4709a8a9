fn main() {
    resource_coordination_system::server::run();
}
