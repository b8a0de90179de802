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


use std::env;

use anyhow::Result;
use azsign_azure_blob::{Config, Credential, RequestAssembler, RequestDescriptor};
use azsign_core::OsEnv;
use http::StatusCode;
use log::{debug, warn};
use reqwest::Client;

fn init_signer() -> Option<(Credential, RequestAssembler, String)> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("AZSIGN_AZURE_BLOB_TEST").unwrap_or_default() != "on" {
        return None;
    }

    let config = Config {
        account_name: Some(
            env::var("AZSIGN_AZURE_BLOB_ACCOUNT_NAME")
                .expect("env AZSIGN_AZURE_BLOB_ACCOUNT_NAME must set"),
        ),
        account_key: Some(
            env::var("AZSIGN_AZURE_BLOB_ACCOUNT_KEY")
                .expect("env AZSIGN_AZURE_BLOB_ACCOUNT_KEY must set"),
        ),
        ..Default::default()
    }
    .from_env(&OsEnv)
    .expect("config must be valid");
    let container = env::var("AZSIGN_AZURE_BLOB_CONTAINER")
        .expect("env AZSIGN_AZURE_BLOB_CONTAINER must set");

    let cred = config.credential().expect("credential must be set");
    let assembler = RequestAssembler::new().with_profile(config.profile());

    Some((cred, assembler, container))
}

async fn send(
    cred: &Credential,
    assembler: &RequestAssembler,
    desc: &RequestDescriptor,
) -> Result<StatusCode> {
    let req = assembler.prepare_request(cred, desc)?;
    debug!("signed request: {:?}", req);

    let resp = Client::new().execute(req.try_into()?).await?;
    debug!("got response: {:?}", resp);

    Ok(resp.status())
}

#[tokio::test]
async fn test_get_container_properties() -> Result<()> {
    let Some((cred, assembler, container)) = init_signer() else {
        warn!("AZSIGN_AZURE_BLOB_TEST is not set, skipped");
        return Ok(());
    };

    let desc = RequestDescriptor::new("get", &container).with_resource("?restype=container");
    assert_eq!(StatusCode::OK, send(&cred, &assembler, &desc).await?);
    Ok(())
}

#[tokio::test]
async fn test_list_blobs() -> Result<()> {
    let Some((cred, assembler, container)) = init_signer() else {
        warn!("AZSIGN_AZURE_BLOB_TEST is not set, skipped");
        return Ok(());
    };

    for resource in [
        "?restype=container&comp=list",
        "?restype=container&comp=list&prefix=test/path/to/dir",
        "?restype=container&comp=list&prefix=test%2Fpath%2Fto%2Fdir",
    ] {
        let desc = RequestDescriptor::new("get", &container).with_resource(resource);
        assert_eq!(
            StatusCode::OK,
            send(&cred, &assembler, &desc).await?,
            "Failed for resource: {}",
            resource
        );
    }
    Ok(())
}

#[tokio::test]
async fn test_wrong_key_is_rejected() -> Result<()> {
    let Some((cred, assembler, container)) = init_signer() else {
        warn!("AZSIGN_AZURE_BLOB_TEST is not set, skipped");
        return Ok(());
    };

    let wrong = Credential::with_shared_key(&cred.account_name, "d3Jvbmcga2V5");
    let desc = RequestDescriptor::new("get", &container).with_resource("?restype=container");
    assert_eq!(StatusCode::FORBIDDEN, send(&wrong, &assembler, &desc).await?);
    Ok(())
}
