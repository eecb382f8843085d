pub static HOST: &str = "HOST";
pub static PORT: &str = "PORT";

pub static EMOTION_BACKEND: &str = "EMOTION_BACKEND";
pub static WATSON_URL: &str = "WATSON_URL";
pub static CHAT_MODEL: &str = "CHAT_MODEL";

pub static AWS_LAMBDA_RUNTIME_API: &str = "AWS_LAMBDA_RUNTIME_API";
pub static AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH: &str = "AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH";
