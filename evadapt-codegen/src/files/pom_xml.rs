use evadapt_core::{FileRules, GeneratedFile};

use crate::{
    TemplateContext,
    project::{
        ADAPTER_GROUP_ID, ADAPTER_VERSION, BASE_PACKAGE, CORE_ADAPTER, JAVA_VERSION,
        PROJECT_VERSION, SPRING_BOOT_VERSION,
    },
};

/// The Maven build descriptor
pub struct PomXml<'a> {
    ctx: TemplateContext<'a>,
}

impl<'a> PomXml<'a> {
    pub fn new(ctx: TemplateContext<'a>) -> Self {
        Self { ctx }
    }
}

impl GeneratedFile for PomXml<'_> {
    fn path(&self) -> String {
        "pom.xml".to_string()
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        let config = self.ctx.config;
        let ids = self.ctx.ids;
        let kind = config.database_kind.as_str();

        // `${db.type}` and `${java.version}` are Maven properties, not placeholders.
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0
         http://maven.apache.org/xsd/maven-4.0.0.xsd">
    <modelVersion>4.0.0</modelVersion>

    <parent>
        <groupId>org.springframework.boot</groupId>
        <artifactId>spring-boot-starter-parent</artifactId>
        <version>{boot}</version>
        <relativePath/>
    </parent>

    <groupId>{group}</groupId>
    <artifactId>{artifact_id}</artifactId>
    <version>{version}</version>
    <packaging>jar</packaging>
    <name>{name}</name>
    <description>Generated orchestrator application using {core} and orchestrator-{kind}-adapter</description>

    <properties>
        <java.version>{java}</java.version>
        <db.type>{kind}</db.type>
    </properties>

    <dependencies>
        <dependency>
            <groupId>{adapter_group}</groupId>
            <artifactId>{core}</artifactId>
            <version>{adapter_version}</version>
        </dependency>
        <dependency>
            <groupId>{adapter_group}</groupId>
            <artifactId>orchestrator-${{db.type}}-adapter</artifactId>
            <version>{adapter_version}</version>
        </dependency>
        <dependency>
            <groupId>org.springframework.boot</groupId>
            <artifactId>spring-boot-starter-test</artifactId>
            <scope>test</scope>
        </dependency>
    </dependencies>

    <build>
        <plugins>
            <plugin>
                <groupId>org.springframework.boot</groupId>
                <artifactId>spring-boot-maven-plugin</artifactId>
                <version>{boot}</version>
                <configuration>
                    <mainClass>{main_class}</mainClass>
                </configuration>
            </plugin>
            <plugin>
                <groupId>org.apache.maven.plugins</groupId>
                <artifactId>maven-compiler-plugin</artifactId>
                <version>3.12.1</version>
                <configuration>
                    <source>${{java.version}}</source>
                    <target>${{java.version}}</target>
                    <parameters>true</parameters>
                </configuration>
            </plugin>
        </plugins>
    </build>
</project>
"#,
            boot = SPRING_BOOT_VERSION,
            group = BASE_PACKAGE,
            artifact_id = ids.artifact_id,
            version = PROJECT_VERSION,
            name = config.application_name,
            core = CORE_ADAPTER,
            kind = kind,
            java = JAVA_VERSION,
            adapter_group = ADAPTER_GROUP_ID,
            adapter_version = ADAPTER_VERSION,
            main_class = ids.main_class(),
        )
    }
}
