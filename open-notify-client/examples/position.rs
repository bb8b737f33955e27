use open_notify_client::Client;

fn main() {
    let client = Client::new("http://api.open-notify.org").unwrap();

    let position = client.position().unwrap();
    println!(
        "ISS at lat={:.2} lon={:.2} ({})",
        position.latitude, position.longitude, position.timestamp
    );

    for astronaut in client.astronauts().unwrap() {
        println!("{} in {}", astronaut.name, astronaut.craft);
    }
}
