use contribuzz_config::Config;
use contribuzz_ghapi_interface::ApiService;
use contribuzz_mailer_interface::MailerService;

use crate::CoreModule;

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub api_service: &'a (dyn ApiService + 'a),
    pub mailer_service: &'a (dyn MailerService + 'a),
}

#[cfg(any(test, feature = "testkit"))]
pub mod tests {
    use contribuzz_config::Config;
    use contribuzz_ghapi_interface::MockApiService;
    use contribuzz_mailer_interface::MockMailerService;

    use crate::{CoreContext, CoreModule};

    #[allow(dead_code)]
    pub struct CoreContextTest {
        pub config: Config,
        pub core_module: CoreModule,
        pub api_service: MockApiService,
        pub mailer_service: MockMailerService,
    }

    impl CoreContextTest {
        #[allow(dead_code)]
        pub fn new() -> Self {
            Self {
                config: Config::from_env_no_version(),
                core_module: CoreModule::builder().build(),
                api_service: MockApiService::new(),
                mailer_service: MockMailerService::new(),
            }
        }

        #[allow(dead_code)]
        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                config: &self.config,
                core_module: &self.core_module,
                api_service: &self.api_service,
                mailer_service: &self.mailer_service,
            }
        }
    }

    impl Default for CoreContextTest {
        fn default() -> Self {
            Self::new()
        }
    }
}
