use crate::*;
use sqlx::{MySqlPool, mysql::MySqlPoolOptions};
use std::time::{Duration, Instant};
use testcontainers::{
    ContainerRequest, GenericImage, ImageExt,
    core::{IntoContainerPort as _, Mount, WaitFor, logs::LogFrame},
    runners::AsyncRunner as _,
};
use tokio::sync::OnceCell;

pub type Container = testcontainers::ContainerAsync<GenericImage>;

const MYSQL_USER: &str = "root";
const MYSQL_PASS: &str = "mysql";

// --- Container Singleton ---
pub async fn mysql() -> &'static Container {
    static MYSQL: OnceCell<Container> = OnceCell::const_new();
    const TRIES: u8 = 5;
    MYSQL
        .get_or_init(|| async {
            for attempt in 1..=TRIES {
                match container().await {
                    Ok(container) => return container,
                    Err(e) => {
                        error!("Attempt {attempt}/{TRIES} failed: {e:?}");
                        if attempt == TRIES {
                            error!("Fatal: All attempts failed");
                            std::process::exit(1);
                        }
                    }
                }
            }
            unreachable!()
        })
        .await
}

// --- Pool Helpers ---
/// Connection string for `database` on the test container.
pub(crate) async fn connection_string(database: &str) -> String {
    let container: &Container = mysql().await;
    format!(
        "mysql://{MYSQL_USER}:{MYSQL_PASS}@{}:{}/{database}",
        container.get_host().await.expect("container host"),
        container
            .get_host_port_ipv4(3306)
            .await
            .expect("container port")
    )
}

/// Create a new MySQL connection pool to the test container.
pub(super) async fn pool(database: &str) -> MySqlPool {
    MySqlPoolOptions::new()
        .max_connections(3)
        .connect(&connection_string(database).await)
        .await
        .expect("db init connection failure")
}

// --- Container Setup ---
async fn container() -> Result<Container> {
    debug!("Starting MySQL DB Container");
    let container_startup = Instant::now();
    let container = image().start().await.expect("db startup failure");
    let container_startup = container_startup.elapsed();
    debug!("Container ready in {:#.2?}", container_startup);
    Ok(container)
}

fn image() -> ContainerRequest<GenericImage> {
    const MYSQL_CNF: &[u8] = b"[mysqld]
        skip-log-bin
        innodb_flush_log_at_trx_commit = 0
        innodb_doublewrite = 0
        innodb_buffer_pool_size = 128M
        ";

    let mut image = GenericImage::new("mysql", "8.0")
        .with_exposed_port(3306.tcp())
        // The init phase runs a temporary server on port 0; wait for the real one.
        .with_wait_for(WaitFor::message_on_stderr("port: 3306"))
        .with_copy_to("/etc/mysql/conf.d/test.cnf", MYSQL_CNF.to_vec())
        .with_env_var("MYSQL_ROOT_PASSWORD", MYSQL_PASS);

    if config().container_logs {
        image = image.with_log_consumer(|line: &LogFrame| trace!("[Container Logs] {line:?}"));
    }

    if config().container_ramdisked {
        image = image.with_mount(Mount::tmpfs_mount("/var/lib/mysql"));
    }

    image.with_startup_timeout(Duration::from_secs(120))
}
