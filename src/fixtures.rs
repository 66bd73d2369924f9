#[cfg(test)]
pub mod test {
    use std::path::PathBuf;
    use std::time::Duration;

    use serde::{Deserialize, Serialize};

    use crate::types::{Field, Settings};

    #[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
    pub struct TestConfig {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub config_path: Option<PathBuf>,
        pub service_name: String,
        pub log_addr: String,
        pub log_level: String,
        pub server: ServerConfig,
    }

    #[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
    pub struct ServerConfig {
        pub http: HttpConfig,
        pub grpc: GrpcConfig,
        pub profile: ProfileConfig,
    }

    #[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
    pub struct HttpConfig {
        pub listen: String,
        #[serde(with = "humantime_serde")]
        pub read_timeout: Duration,
        #[serde(with = "humantime_serde")]
        pub write_timeout: Duration,
    }

    #[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
    pub struct GrpcConfig {
        pub listen: String,
        #[serde(with = "humantime_serde")]
        pub timeout: Duration,
    }

    #[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
    pub struct ProfileConfig {
        pub mode: String,
        pub listen: String,
    }

    impl Settings for TestConfig {
        fn fields() -> Vec<Field> {
            vec![
                Field::new("config_path").env("APP_CONFIG").cli("config").short_cli("c"),
                Field::new("service_name").default("disk").env("SERVICE_NAME"),
                Field::new("log_addr").env("LOG_ADDR"),
                Field::new("log_level")
                    .default("debug")
                    .env("LOG_LEVEL")
                    .cli("log-level")
                    .short_cli("l"),
                Field::new("server.http.listen")
                    .default(":8080")
                    .env("SERVER_HTTP_LISTEN")
                    .cli("http-listen"),
                Field::new("server.http.read_timeout")
                    .default("120s")
                    .env("SERVER_HTTP_READ_TIMEOUT"),
                Field::new("server.http.write_timeout")
                    .default("120s")
                    .env("SERVER_HTTP_WRITE_TIMEOUT"),
                Field::new("server.grpc.listen")
                    .default("tcp://:8081")
                    .env("SERVER_GRPC_LISTEN")
                    .cli("grpc-listen"),
                Field::new("server.grpc.timeout")
                    .default("120s")
                    .env("SERVER_GRPC_TIMEOUT"),
                Field::new("server.profile.mode").env("SERVER_PROFILE_MODE"),
                Field::new("server.profile.listen").env("SERVER_PROFILE_LISTEN"),
            ]
        }

        fn config_file(&self) -> Option<PathBuf> {
            self.config_path.clone()
        }
    }

    // -- Fixture covering scalar, optional and list field types ----------------

    #[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
    pub struct ServiceConfig {
        pub port: u16,
        pub offset: i64,
        pub ratio: f64,
        pub debug: bool,
        pub verbose: Option<bool>,
        pub token: Option<String>,
        pub workers: Option<u32>,
        pub tags: Vec<String>,
    }

    impl Settings for ServiceConfig {
        fn fields() -> Vec<Field> {
            vec![
                Field::new("port").default("8080").env("PORT").cli("port").short_cli("p"),
                Field::new("offset").cli("offset"),
                Field::new("ratio").default("0.5").cli("ratio"),
                Field::new("debug").env("DEBUG").cli("debug").short_cli("d"),
                Field::new("verbose").env("VERBOSE").cli("verbose"),
                Field::new("token").env("TOKEN"),
                Field::new("workers").env("WORKERS").cli("workers"),
                Field::new("tags").default("web,api").env("TAGS"),
            ]
        }
    }

    #[test]
    fn test_config_serializes_to_full_document() {
        let doc = serde_json::to_value(TestConfig::default()).unwrap();
        assert_eq!(doc["server"]["http"]["read_timeout"], "0s");
        assert_eq!(doc["server"]["profile"]["mode"], "");
        assert!(doc.get("config_path").is_none());
    }
}
