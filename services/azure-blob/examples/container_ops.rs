// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.


use anyhow::Result;
use azsign_azure_blob::{Config, RequestAssembler, RequestDescriptor};
use azsign_core::OsEnv;
use reqwest::Client;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();
    let _ = dotenv::dotenv();

    // Reads AZBLOB_ACCOUNT_NAME / AZBLOB_ACCOUNT_KEY or AZURE_STORAGE_CONNECTION_STRING.
    let config = Config::default().from_env(&OsEnv)?;
    let Some(cred) = config.credential() else {
        println!("No Azure credentials found");
        println!("To sign real requests, set AZBLOB_ACCOUNT_NAME and AZBLOB_ACCOUNT_KEY");
        return Ok(());
    };

    let container = std::env::args().nth(1).unwrap_or_else(|| "test".to_string());
    let assembler = RequestAssembler::new().with_profile(config.profile());

    // Create the container, then list its blobs.
    for (method, resource) in [
        ("put", "?restype=container"),
        ("get", "?restype=container&comp=list"),
    ] {
        let desc = RequestDescriptor::new(method, &container).with_resource(resource);
        let req = assembler.prepare_request(&cred, &desc)?;
        println!("{} {}", req.method(), req.uri());
        println!("x-ms-date header: {:?}", req.headers().get("x-ms-date"));

        let resp = Client::new().execute(req.try_into()?).await?;
        println!("Response status: {}", resp.status());
        println!("{}", resp.text().await?);
    }

    Ok(())
}
