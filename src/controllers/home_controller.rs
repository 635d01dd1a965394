pub async fn index() -> &'static str {
    "cinema-booking API"
}
