pub mod a001_tenant_standards;
