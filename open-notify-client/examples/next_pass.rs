use open_notify_client::Client;

fn main() {
    let client = Client::new("http://api.open-notify.org").unwrap();

    // Indianapolis, IN
    let pass = client.next_pass(39.7684, -86.1581).unwrap();
    println!("Next pass: {}", pass.rise_time);
}
