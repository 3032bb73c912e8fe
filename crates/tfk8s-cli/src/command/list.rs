//! List Data Sources Command
//!
//! Prints the type name of every data source the provider serves, one per
//! line.

use anyhow::Result;
use clap::Parser;

use tfk8s_framework::Provider;

#[derive(Debug, Parser)]
pub struct ListOpt;

impl ListOpt {
    pub fn process(&self, provider: &Provider) -> Result<()> {
        for type_name in provider.data_sources() {
            println!("{type_name}");
        }

        Ok(())
    }
}
