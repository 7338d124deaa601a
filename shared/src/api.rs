// API route constants
pub mod routes {
    pub const INDEX: &str = "/";
    pub const HEALTH: &str = "/health";

    pub const EPISODES: &str = "/episodes";
    pub const EPISODE_DETAIL: &str = "/episodes/:id";

    pub const GUESTS: &str = "/guests";

    pub const APPEARANCES: &str = "/appearances";

    /// Concrete path for one episode, for clients.
    pub fn episode(id: i32) -> String {
        format!("{}/{}", EPISODES, id)
    }
}

#[cfg(test)]
mod tests {
    use super::routes;

    #[test]
    fn test_episode_path() {
        assert_eq!(routes::episode(7), "/episodes/7");
    }
}
