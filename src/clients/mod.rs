pub(crate) mod daily_client;
