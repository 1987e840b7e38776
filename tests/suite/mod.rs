mod key_flows;
mod scenarios;
